//! Tips command implementation.

use crate::error::Result;
use crate::output::Formatter;
use truthlens_domain::education::EDUCATIONAL_TIPS;

/// Print the built-in tips for spotting misinformation.
pub fn execute_tips(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_tips(EDUCATIONAL_TIPS)?);
    Ok(())
}

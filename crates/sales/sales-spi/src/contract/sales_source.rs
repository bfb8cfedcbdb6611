//! Sales source trait definition.

use crate::error::Result;
use crate::model::SalesSeries;

/// Anything that can produce a validated sales history.
///
/// Implementations own their I/O; the analysis crates only ever see the
/// resulting [`SalesSeries`].
pub trait SalesSource: Send + Sync {
    /// Source name, used in log lines.
    fn name(&self) -> &str;

    /// Load the full history once.
    fn load(&self) -> Result<SalesSeries>;
}

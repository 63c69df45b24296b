//! Command handlers, one module per subcommand family.

pub(crate) mod get;
pub(crate) mod list;
pub(crate) mod monitor;
pub(crate) mod status;
pub(crate) mod submit;

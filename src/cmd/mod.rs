/// URL assembly command.
pub mod build;
/// Query string decode command.
pub mod decode;
/// Query expansion command.
pub mod expand;
pub(crate) mod util;

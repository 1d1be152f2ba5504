mod complete;
mod question;
mod reveal;

pub use self::complete::*;
pub use self::question::*;
pub use self::reveal::*;

pub use self::auto::*;

mod auto;

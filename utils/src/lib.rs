#[cfg(feature = "fmt")]
pub mod fmt;
#[cfg(feature = "iter")]
pub mod iter;
#[cfg(feature = "math")]
pub mod math;
#[cfg(feature = "memoize")]
pub mod memoize;
#[cfg(feature = "string")]
pub mod string;
#[cfg(feature = "time")]
pub mod time;

mod boxspec;
pub use boxspec::*;

mod error;
pub use error::*;

mod locale;
pub use locale::*;

mod metrics;
pub use metrics::*;

mod options;
pub use options::*;

mod place;
pub use place::*;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;

pub mod axis;
pub mod observation;
pub mod plot_configs;
pub mod series;
pub mod state;

pub use axis::*;
pub use observation::*;
pub use plot_configs::*;
pub use series::*;
pub use state::*;

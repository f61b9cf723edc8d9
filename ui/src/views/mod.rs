mod cycle;
mod home;
mod load;
mod trends;
mod upload;

pub use cycle::CycleDashboard;
pub use home::Home;
pub use trends::ProjectTrends;
pub use upload::Upload;

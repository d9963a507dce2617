pub mod cli;
pub mod containers;
pub mod images;
pub mod networks;
pub mod system;
pub mod terminal;
pub mod test_support;
pub mod volumes;

pub use cli::{ContainerRuntime, DockerCli};
pub use containers::parse_container_output;
pub use images::parse_image_output;
pub use networks::parse_network_output;
pub use system::parse_version_output;
pub use volumes::parse_volume_output;

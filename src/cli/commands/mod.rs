pub mod add;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;

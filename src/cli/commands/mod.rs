pub mod extract;
pub mod helper;
pub mod init;
pub mod migrate;

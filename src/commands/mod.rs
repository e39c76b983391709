pub mod generate;
pub mod init;
pub mod list;
pub mod run;

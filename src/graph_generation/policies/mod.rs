mod directory_naming;

pub use directory_naming::DirectoryNaming;

pub mod audio;
pub mod matching;
pub mod session;
pub mod verses;

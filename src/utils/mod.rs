pub mod io;
pub mod limits;

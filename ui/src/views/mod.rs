mod home;
pub use home::Home;

mod info;
pub use info::Info;

mod by_year;
pub use by_year::NameByYear;

mod search;
pub use search::NameSearch;

mod cloud;
pub use cloud::NameCloud;

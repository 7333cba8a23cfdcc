mod study_list_file;

pub use study_list_file::parse_study_list;
pub use study_list_file::read_study_list_file;

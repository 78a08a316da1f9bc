mod allow_list;

pub use allow_list::ConflictAllowList;

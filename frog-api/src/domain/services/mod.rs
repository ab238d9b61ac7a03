mod entries;

pub use entries::EntriesServiceImpl;

pub mod json_collection;
pub mod storage;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}

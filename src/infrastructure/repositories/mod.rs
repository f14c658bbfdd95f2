//! Repository implementations using SeaORM

pub mod faculty_repository;

pub use faculty_repository::SeaOrmFacultyRepository;

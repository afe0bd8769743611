pub mod db;
pub mod entity;
pub mod repo;

pub mod developer_repository;

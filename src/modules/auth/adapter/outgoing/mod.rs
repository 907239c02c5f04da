pub mod sea_orm_entity;
pub mod session_gate_postgres;

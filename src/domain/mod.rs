// Domain layer: the CPF value type, its patterns, records and ports.

pub mod cpf;
pub mod model;
pub mod patterns;
pub mod ports;

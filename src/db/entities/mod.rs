pub mod convenio;
pub mod paciente;
pub mod pessoa;

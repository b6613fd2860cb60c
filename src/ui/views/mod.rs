pub mod cierre;
pub mod formulario;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rol {
    Alumno,
    Entrenador,
    Asistente,
    Administrador,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoTransaccion {
    PagoMovil,
    Transferencia,
    Deposito,
    Efectivo,
    Zelle,
    Binance,
    Paypal,
    Otro,
}

#[derive(Debug)]
pub struct EnumParseError {
    enum_name: &'static str,
    value: String,
}

impl EnumParseError {
    fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} value: {}", self.enum_name, self.value)
    }
}

impl std::error::Error for EnumParseError {}

impl Rol {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alumno => "ALUMNO",
            Self::Entrenador => "ENTRENADOR",
            Self::Asistente => "ASISTENTE",
            Self::Administrador => "ADMINISTRADOR",
        }
    }
}

impl std::str::FromStr for Rol {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "ALUMNO" => Ok(Self::Alumno),
            "ENTRENADOR" => Ok(Self::Entrenador),
            "ASISTENTE" => Ok(Self::Asistente),
            "ADMINISTRADOR" => Ok(Self::Administrador),
            _ => Err(EnumParseError::new("rol", value)),
        }
    }
}

impl TipoTransaccion {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PagoMovil => "PAGO_MOVIL",
            Self::Transferencia => "TRANSFERENCIA",
            Self::Deposito => "DEPOSITO",
            Self::Efectivo => "EFECTIVO",
            Self::Zelle => "ZELLE",
            Self::Binance => "BINANCE",
            Self::Paypal => "PAYPAL",
            Self::Otro => "OTRO",
        }
    }
}

impl std::str::FromStr for TipoTransaccion {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "PAGO_MOVIL" => Ok(Self::PagoMovil),
            "TRANSFERENCIA" => Ok(Self::Transferencia),
            "DEPOSITO" => Ok(Self::Deposito),
            "EFECTIVO" => Ok(Self::Efectivo),
            "ZELLE" => Ok(Self::Zelle),
            "BINANCE" => Ok(Self::Binance),
            "PAYPAL" => Ok(Self::Paypal),
            "OTRO" => Ok(Self::Otro),
            _ => Err(EnumParseError::new("tipo_transaccion", value)),
        }
    }
}

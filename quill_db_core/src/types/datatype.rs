use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    VarChar,
    Float,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "INT",
            DataType::VarChar => "VARCHAR",
            DataType::Float => "FLOAT",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn parse_datatype(s: &str) -> Result<DataType, String> {
    match s.to_lowercase().as_str() {
        "int" => Ok(DataType::Int),
        "varchar" | "str" => Ok(DataType::VarChar),
        "float" => Ok(DataType::Float),
        other => Err(format!("Unknown type '{other}'. Use int|varchar|float")),
    }
}

/// The types of the language.
///
/// `Console` and `Void` are pseudo types. `Console` is the type of the
/// `console` expression (a read source or write destination) and `Void`
/// is only ever a program's return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Float,
    Boolean,
    String,
    Color,
    ColorFloat,
    Image,
    Void,
    Console,
}

impl Type {
    /// The type denoted by a `TYPE` or `KW_VOID` keyword.
    pub fn from_keyword(keyword: &str) -> Option<Type> {
        let ty = match keyword {
            "int" => Type::Int,
            "float" => Type::Float,
            "boolean" => Type::Boolean,
            "string" => Type::String,
            "color" => Type::Color,
            "image" => Type::Image,
            "void" => Type::Void,
            _ => return None,
        };

        Some(ty)
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Type::Int => Some("int"),
            Type::Float => Some("float"),
            Type::Boolean => Some("boolean"),
            Type::String => Some("string"),
            Type::Color => Some("color"),
            Type::Image => Some("image"),
            Type::Void => Some("void"),
            Type::ColorFloat | Type::Console => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Type::Color | Type::ColorFloat)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Int => "INT",
            Type::Float => "FLOAT",
            Type::Boolean => "BOOLEAN",
            Type::String => "STRING",
            Type::Color => "COLOR",
            Type::ColorFloat => "COLORFLOAT",
            Type::Image => "IMAGE",
            Type::Void => "VOID",
            Type::Console => "CONSOLE",
        };

        f.write_str(name)
    }
}

use std::fmt;


#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Qr,
    NormalEquations,
}

impl Method {
    pub fn method_name(self) -> &'static str {
        match self {
            Method::Qr              => "householder qr",
            Method::NormalEquations => "normal equations",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

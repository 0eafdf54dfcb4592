use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    /// Literals are written into the SQL text
    Inline,
    Mysql,
    Postgresql,
    Sqlite,
}

impl Serializer {
    pub fn inline() -> Serializer {
        Serializer {
            flavor: Flavor::Inline,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }
}

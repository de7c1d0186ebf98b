use super::{ConfigError, Vars};

/// Something that can feed dotenv text into a variable table.
///
/// Sources are tokenized in registration order into a single table, so a
/// later source overwrites same-named variables of an earlier one.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn load_into(&self, vars: &mut Vars) -> Result<(), ConfigError>;
}

/// An in-memory dotenv buffer.
#[derive(Debug, Clone)]
pub struct BytesSource {
    input: Vec<u8>,
}

impl BytesSource {
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl ConfigSource for BytesSource {
    fn load_into(&self, vars: &mut Vars) -> Result<(), ConfigError> {
        vars.parse_into(self.input.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_source_loads_into_table() {
        let mut vars = Vars::new();
        vars.insert("KEEP", "1");

        BytesSource::new("USERNAME=msd # username")
            .load_into(&mut vars)
            .unwrap();

        assert_eq!(vars.get("USERNAME"), Some("msd"));
        assert_eq!(vars.get("KEEP"), Some("1"));
    }

    #[test]
    fn test_bytes_source_empty_input() {
        let mut vars = Vars::new();
        BytesSource::new(Vec::new()).load_into(&mut vars).unwrap();
        assert!(vars.is_empty());
    }
}

use contracts::domain::a001_condominio::CondominioTipo;

use super::synchronizer::UnitFieldView;

pub const DEFAULT_LABEL: &str = "Apartamento";
pub const HOUSE_LABEL: &str = "Casa (Ex: Casa 5)";
pub const HOUSE_PLACEHOLDER: &str = "Ex: Casa 5";
pub const APARTMENT_LABEL: &str = "Apartamento (Ex: Bloco A, 101)";
pub const APARTMENT_PLACEHOLDER: &str = "Ex: Bloco A, 101";

/// Label and placeholder to show for the unit field
///
/// `placeholder: None` leaves the current placeholder as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitFieldDisplay {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
}

impl UnitFieldDisplay {
    /// Nothing selected: bare label, empty placeholder
    pub fn no_selection() -> Self {
        Self {
            label: DEFAULT_LABEL,
            placeholder: Some(""),
        }
    }

    /// Anything that is not "casas" is shown as a building
    pub fn for_tipo(tipo: &CondominioTipo) -> Self {
        if tipo.is_houses() {
            Self {
                label: HOUSE_LABEL,
                placeholder: Some(HOUSE_PLACEHOLDER),
            }
        } else {
            Self {
                label: APARTMENT_LABEL,
                placeholder: Some(APARTMENT_PLACEHOLDER),
            }
        }
    }

    /// Lookup failed: bare label, placeholder untouched
    pub fn failed() -> Self {
        Self {
            label: DEFAULT_LABEL,
            placeholder: None,
        }
    }

    pub fn apply<V: UnitFieldView + ?Sized>(&self, view: &V) {
        view.set_label(self.label);
        if let Some(placeholder) = self.placeholder {
            view.set_placeholder(placeholder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tipo() {
        assert_eq!(
            UnitFieldDisplay::for_tipo(&CondominioTipo::Casas),
            UnitFieldDisplay {
                label: "Casa (Ex: Casa 5)",
                placeholder: Some("Ex: Casa 5"),
            }
        );
        let apartment = UnitFieldDisplay {
            label: "Apartamento (Ex: Bloco A, 101)",
            placeholder: Some("Ex: Bloco A, 101"),
        };
        assert_eq!(UnitFieldDisplay::for_tipo(&CondominioTipo::Predio), apartment);
        assert_eq!(
            UnitFieldDisplay::for_tipo(&CondominioTipo::Other("casa".into())),
            apartment
        );
        assert_eq!(
            UnitFieldDisplay::for_tipo(&CondominioTipo::Other(String::new())),
            apartment
        );
    }

    #[test]
    fn test_default_branches() {
        assert_eq!(UnitFieldDisplay::no_selection().label, "Apartamento");
        assert_eq!(UnitFieldDisplay::no_selection().placeholder, Some(""));
        assert_eq!(UnitFieldDisplay::failed().label, "Apartamento");
        assert_eq!(UnitFieldDisplay::failed().placeholder, None);
    }
}

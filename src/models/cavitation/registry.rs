use std::{collections::BTreeMap, fmt};

use log::{debug, info};

use crate::support::config::Dictionary;

use super::{CavitationError, CavitationModel, Components, Kunz, Merkle, SchnerrSauer};

/// Configuration key naming the model to construct.
pub const MODEL_KEY: &str = "model";

/// A function building a model from the loaded configuration and host fields.
pub type Constructor = for<'a> fn(
    &Dictionary,
    Components<'a>,
) -> Result<Box<dyn CavitationModel + 'a>, CavitationError>;

/// Maps configuration tags to model constructors.
///
/// Registration is explicit: a host either starts from
/// [`ModelRegistry::standard`] or registers exactly the models it supports.
///
/// # Example
///
/// ```
/// use cavitation_models::models::cavitation::ModelRegistry;
///
/// let registry = ModelRegistry::standard();
/// assert_eq!(registry.names(), ["kunz", "merkle", "schnerr_sauer"]);
/// ```
#[derive(Clone, Default)]
pub struct ModelRegistry {
    constructors: BTreeMap<String, Constructor>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing the bundled correlations.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Kunz::NAME, new_kunz);
        registry.register(Merkle::NAME, new_merkle);
        registry.register(SchnerrSauer::NAME, new_schnerr_sauer);
        registry
    }

    /// Registers `constructor` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) -> &mut Self {
        let name = name.into();
        debug!("registering cavitation model `{name}`");
        self.constructors.insert(name, constructor);
        self
    }

    /// Returns the registered tags in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Loads the configuration and constructs the model it names.
    ///
    /// # Errors
    ///
    /// Returns [`CavitationError`] if the configuration cannot be loaded,
    /// has no `model` entry, names an unregistered model, or fails that
    /// model's own validation.
    pub fn new_model<'a>(
        &self,
        components: Components<'a>,
    ) -> Result<Box<dyn CavitationModel + 'a>, CavitationError> {
        let dict = components.source.load()?;
        let name: String = dict.lookup(MODEL_KEY)?;

        let constructor =
            self.constructors
                .get(&name)
                .ok_or_else(|| CavitationError::UnknownModel {
                    available: self.names().into_iter().map(String::from).collect(),
                    name: name.clone(),
                })?;

        info!("selecting cavitation model `{name}`");
        constructor(&dict, components)
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.constructors.keys()).finish()
    }
}

fn new_kunz<'a>(
    dict: &Dictionary,
    components: Components<'a>,
) -> Result<Box<dyn CavitationModel + 'a>, CavitationError> {
    Ok(Box::new(Kunz::new(dict, components)?))
}

fn new_merkle<'a>(
    dict: &Dictionary,
    components: Components<'a>,
) -> Result<Box<dyn CavitationModel + 'a>, CavitationError> {
    Ok(Box::new(Merkle::new(dict, components)?))
}

fn new_schnerr_sauer<'a>(
    dict: &Dictionary,
    components: Components<'a>,
) -> Result<Box<dyn CavitationModel + 'a>, CavitationError> {
    Ok(Box::new(SchnerrSauer::new(dict, components)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::cavitation::{
            CavitationBase, CavitationModelExt, RatePair,
            test_support::{Fixture, RHO_LIQUID, RHO_VAPOR},
        },
        support::{config::ConfigError, field::ScalarField},
    };

    /// Returns fixed mass coefficients, for exercising the derived rates.
    #[derive(Debug)]
    struct Constant<'a> {
        base: CavitationBase<'a>,
        production: f64,
        destruction: f64,
    }

    impl CavitationModel for Constant<'_> {
        fn name(&self) -> &'static str {
            "constant"
        }

        fn base(&self) -> &CavitationBase<'_> {
            &self.base
        }

        fn m_dot_alpha_w(&self) -> RatePair {
            let cells = self.base.pressure().len();
            RatePair::new(
                ScalarField::uniform(cells, self.production),
                ScalarField::uniform(cells, self.destruction),
            )
        }

        fn m_dot_p(&self) -> RatePair {
            self.m_dot_alpha_w().map(|m| m / 200.0)
        }

        fn correct(&mut self) {}

        fn read(&mut self) -> bool {
            match self.base.reload("constant", |dict| Ok(dict.lookup::<f64>("production")?)) {
                Some(production) => {
                    self.production = production;
                    true
                }
                None => false,
            }
        }
    }

    fn new_constant<'a>(
        dict: &Dictionary,
        components: Components<'a>,
    ) -> Result<Box<dyn CavitationModel + 'a>, CavitationError> {
        let base = CavitationBase::new(dict, components)?;
        let coeffs = dict.sub_dict("constant")?;
        Ok(Box::new(Constant {
            base,
            production: coeffs.lookup("production")?,
            destruction: coeffs.lookup("destruction")?,
        }))
    }

    const CONSTANT: &str = r#"
        model = "constant"
        p_sat = 2300.0

        [constant]
        production = 2000.0
        destruction = 500.0
    "#;

    #[test]
    fn standard_registry_builds_every_bundled_model() {
        let configs = [
            r#"
                model = "kunz"
                p_sat = 2300.0
                [kunz]
                free_stream_velocity = 10.0
                free_stream_time = 0.01
                condensation_coeff = 100.0
                vaporization_coeff = 100.0
            "#,
            r#"
                model = "merkle"
                p_sat = 2300.0
                [merkle]
                free_stream_velocity = 10.0
                free_stream_time = 0.01
                condensation_coeff = 1.0
                vaporization_coeff = 1.0
            "#,
            r#"
                model = "schnerr_sauer"
                p_sat = 2300.0
                [schnerr_sauer]
                nucleation_density = 1.0e13
                nucleus_diameter = 1.0e-6
            "#,
        ];
        let registry = ModelRegistry::standard();

        for (config, expected) in configs.iter().zip(registry.names()) {
            let fixture = Fixture::new(config, 4);
            fixture.set_state(&[500.0, 2300.0, 4000.0, 1.0e5], &[1.0, 0.5, 0.1, 0.0]);

            let model = registry.new_model(fixture.components()).unwrap();
            assert_eq!(model.name(), expected);
            model.m_dot_alpha_w().validate(4).unwrap();
            model.m_dot_p().validate(4).unwrap();
            model.v_dot_alpha_v().validate(4).unwrap();
        }
    }

    #[test]
    fn derived_rates_for_a_registered_model() {
        let mut registry = ModelRegistry::new();
        registry.register("constant", new_constant);

        let fixture = Fixture::new(CONSTANT, 1);
        let model = registry.new_model(fixture.components()).unwrap();

        let liquid = model.v_dot_alpha_w();
        assert_relative_eq!(liquid.production[0], 2000.0 / RHO_LIQUID);
        assert_relative_eq!(liquid.destruction[0], 500.0 / RHO_LIQUID);

        let vapor = model.v_dot_alpha_v();
        assert_relative_eq!(vapor.production[0], 500.0 / RHO_VAPOR);
        assert_relative_eq!(vapor.destruction[0], 2000.0 / RHO_VAPOR);

        let pressure = model.v_dot_p();
        assert_relative_eq!(pressure.production[0], 10.0 / RHO_LIQUID);
        assert_relative_eq!(pressure.destruction[0], 2.5 / RHO_LIQUID);
    }

    #[test]
    fn unknown_model_lists_alternatives() {
        let fixture = Fixture::new("model = \"zwart\"\np_sat = 2300.0", 1);
        let err = ModelRegistry::standard()
            .new_model(fixture.components())
            .unwrap_err();

        match err {
            CavitationError::UnknownModel { name, available } => {
                assert_eq!(name, "zwart");
                assert_eq!(available, ["kunz", "merkle", "schnerr_sauer"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_model_tag_is_fatal() {
        let fixture = Fixture::new("p_sat = 2300.0", 1);
        let err = ModelRegistry::standard()
            .new_model(fixture.components())
            .unwrap_err();

        assert!(matches!(
            err,
            CavitationError::Config(ConfigError::MissingEntry { key }) if key == MODEL_KEY
        ));
    }

    #[test]
    fn missing_p_sat_fails_before_fields_are_read() {
        let fixture = Fixture::new(&CONSTANT.replace("p_sat = 2300.0", ""), 1);
        let mut registry = ModelRegistry::standard();
        registry.register("constant", new_constant);

        // Any attempt to read a field while these guards are held would panic.
        let _p = fixture.pressure.get_mut();
        let _rho = fixture.rho_liquid.get_mut();
        let _alpha = fixture.water.field().get_mut();

        let err = registry.new_model(fixture.components()).unwrap_err();
        assert!(matches!(
            err,
            CavitationError::Config(ConfigError::MissingEntry { key }) if key == "p_sat"
        ));

        for config in [
            r#"
                model = "kunz"
                [kunz]
                free_stream_velocity = 1.0
                free_stream_time = 1.0
                condensation_coeff = 1.0
                vaporization_coeff = 1.0
            "#,
            r#"
                model = "schnerr_sauer"
                [schnerr_sauer]
                nucleation_density = 1.0
                nucleus_diameter = 1.0
            "#,
        ] {
            fixture.source.replace(config);
            assert!(registry.new_model(fixture.components()).is_err());
        }
    }

    #[test]
    fn non_positive_p_sat_is_rejected() {
        let fixture = Fixture::new(&CONSTANT.replace("2300.0", "-1.0"), 1);
        let mut registry = ModelRegistry::new();
        registry.register("constant", new_constant);

        assert!(matches!(
            registry.new_model(fixture.components()),
            Err(CavitationError::InvalidCoefficient { name: "p_sat", .. })
        ));
    }

    #[test]
    fn read_is_idempotent_and_keeps_state_on_failure() {
        let mut registry = ModelRegistry::new();
        registry.register("constant", new_constant);

        let fixture = Fixture::new(CONSTANT, 1);
        let mut model = registry.new_model(fixture.components()).unwrap();

        assert!(model.read());
        let first = (model.p_sat(), model.m_dot_alpha_w());
        assert!(model.read());
        let second = (model.p_sat(), model.m_dot_alpha_w());
        assert_eq!(first, second);

        fixture.source.replace("this is not toml = = =");
        assert!(!model.read());
        assert_eq!((model.p_sat(), model.m_dot_alpha_w()), second);

        fixture.source.replace(CONSTANT.replace("p_sat = 2300.0", ""));
        assert!(!model.read());
        assert_eq!((model.p_sat(), model.m_dot_alpha_w()), second);
    }
}

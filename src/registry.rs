//! Builders for the per-grader evaluation environment.
//!
//! A grader configuration calls [`build_functions`], [`build_constants`] and
//! [`build_suffixes`] once when it is set up; the resulting maps are handed to
//! the external formula parser as the environment for identifier and
//! function-call resolution, and are reused across every sampled trial of that
//! configuration. The base registries are never mutated; each builder returns a
//! freshly derived map.

use crate::builtin::Builtin;
use crate::consts::{DEFAULT_CONSTANTS, DEFAULT_SUFFIXES, METRIC_SUFFIXES};
use crate::error::ConfigError;
use crate::funcs;
use crate::value::Value;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The base function registry, built once at first use.
pub static DEFAULT_FUNCTIONS: Lazy<HashMap<&'static str, Arc<dyn Builtin>>> =
    Lazy::new(funcs::all);

/// The plain-function half of a builder result.
pub type FunctionMap = HashMap<String, Arc<dyn Builtin>>;

/// The randomized-function half of a builder result.
pub type RandomFunctionMap = HashMap<String, RandomFunction>;

/// A capability that produces one concrete function on demand, supplied by the
/// external sampling subsystem.
pub trait FunctionSamplingSet: fmt::Debug + Send + Sync {
    /// Draws one concrete function.
    fn gen_sample(&self) -> Arc<dyn Builtin>;
}

/// A named stand-in for a function whose concrete identity is drawn per trial.
#[derive(Debug, Clone)]
pub enum RandomFunction {
    /// A finite list of concrete functions to draw from uniformly.
    ///
    /// Validated non-empty by [`build_functions`].
    Choices(Vec<Arc<dyn Builtin>>),

    /// A generic sampling capability.
    Sampler(Arc<dyn FunctionSamplingSet>),
}

impl RandomFunction {
    /// Draws the concrete function for one trial.
    pub fn gen_sample(&self) -> Arc<dyn Builtin> {
        match self {
            RandomFunction::Choices(funcs) => Arc::clone(
                funcs
                    .choose(&mut rand::thread_rng())
                    .expect("choice lists are validated non-empty at build time"),
            ),
            RandomFunction::Sampler(set) => set.gen_sample(),
        }
    }
}

/// A user-supplied function registration, applied after whitelist/blacklist
/// filtering and taking precedence by name.
#[derive(Debug, Clone)]
pub enum UserFunction {
    /// A single concrete function, inserted into the plain-function map.
    Fixed(Arc<dyn Builtin>),

    /// A finite list of concrete functions, registered as a randomized
    /// function of the "finite list" kind.
    Choices(Vec<Arc<dyn Builtin>>),

    /// A generic function sampling set, registered as-is under the randomized
    /// functions.
    Sampler(Arc<dyn FunctionSamplingSet>),
}

/// Builds the function maps for one grader configuration.
///
/// A non-empty `whitelist` selects entries from the base library by name
/// (`None` entries are no-ops, so `&[None]` whitelists everything out); an
/// empty whitelist starts from the full base library minus the `blacklist`.
/// Supplying both is a configuration error, as is any whitelist or blacklist
/// name the base library does not know.
pub fn build_functions(
    whitelist: &[Option<String>],
    blacklist: &[String],
    user_funcs: HashMap<String, UserFunction>,
) -> Result<(FunctionMap, RandomFunctionMap), ConfigError> {
    if !whitelist.is_empty() && !blacklist.is_empty() {
        return Err(ConfigError::WhitelistAndBlacklist);
    }

    let mut functions: FunctionMap = if whitelist.is_empty() {
        DEFAULT_FUNCTIONS
            .iter()
            .map(|(name, func)| (name.to_string(), Arc::clone(func)))
            .collect()
    } else {
        let mut map = FunctionMap::new();
        for entry in whitelist {
            let Some(name) = entry else {
                continue;
            };
            let func = DEFAULT_FUNCTIONS.get(name.as_str()).ok_or_else(|| {
                ConfigError::UnknownWhitelistEntry {
                    name: name.clone(),
                    suggestions: suggestions_for(name),
                }
            })?;
            map.insert(name.clone(), Arc::clone(func));
        }
        map
    };

    for name in blacklist {
        if functions.remove(name.as_str()).is_none() {
            return Err(ConfigError::UnknownBlacklistEntry {
                name: name.clone(),
                suggestions: suggestions_for(name),
            });
        }
    }

    let mut random_functions = RandomFunctionMap::new();
    for (name, func) in user_funcs {
        validate_name(&name)?;
        match func {
            UserFunction::Fixed(func) => {
                functions.insert(name, func);
            }
            UserFunction::Choices(choices) => {
                if choices.is_empty() {
                    return Err(ConfigError::EmptyFunctionList(name));
                }
                random_functions.insert(name, RandomFunction::Choices(choices));
            }
            UserFunction::Sampler(set) => {
                random_functions.insert(name, RandomFunction::Sampler(set));
            }
        }
    }

    Ok((functions, random_functions))
}

/// Builds the constant map for one grader configuration: the base constants,
/// then each user entry inserted or overwriting by name.
pub fn build_constants(
    user_constants: &HashMap<String, Value>,
) -> Result<HashMap<String, Value>, ConfigError> {
    let mut map: HashMap<String, Value> = DEFAULT_CONSTANTS
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    for (name, value) in user_constants {
        validate_name(name)?;
        map.insert(name.clone(), value.clone());
    }
    Ok(map)
}

/// Builds the suffix map: percent always, the SI prefixes on request. There is
/// no user extension point for suffixes.
pub fn build_suffixes(include_metric: bool) -> HashMap<char, f64> {
    let mut map = DEFAULT_SUFFIXES.clone();
    if include_metric {
        map.extend(METRIC_SUFFIXES.iter());
    }
    map
}

/// User-supplied names must look like identifiers; anything else is a
/// configuration error surfaced at build time.
fn validate_name(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidName(name.to_string()))
    }
}

/// Base-library names within a small edit distance of `name`, closest first.
fn suggestions_for(name: &str) -> Vec<String> {
    let mut close: Vec<(usize, &str)> = DEFAULT_FUNCTIONS
        .keys()
        .map(|candidate| (levenshtein::levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .collect();
    close.sort_unstable();
    close.into_iter().map(|(_, name)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::NativeFunction;
    use crate::error::EvalError;

    fn constant_fn(name: &str, value: f64) -> Arc<dyn Builtin> {
        Arc::new(NativeFunction::unary(name, move |_| Ok(Value::Float(value))))
    }

    #[test]
    fn empty_lists_return_the_base_library() {
        let (functions, random) = build_functions(&[], &[], HashMap::new()).unwrap();
        assert_eq!(functions.len(), DEFAULT_FUNCTIONS.len());
        assert!(functions.contains_key("sin"));
        assert!(functions.contains_key("factorial"));
        assert!(functions.contains_key("conj"));
        assert!(random.is_empty());
    }

    #[test]
    fn none_sentinel_whitelists_everything_out() {
        let (functions, _) = build_functions(&[None], &[], HashMap::new()).unwrap();
        assert!(functions.is_empty());
    }

    #[test]
    fn whitelist_selects_exactly_the_named_entries() {
        let (functions, _) =
            build_functions(&[Some("sin".into())], &[], HashMap::new()).unwrap();
        assert_eq!(functions.len(), 1);
        assert!(functions.contains_key("sin"));
    }

    #[test]
    fn blacklist_removes_entries() {
        let (functions, _) =
            build_functions(&[], &["sin".into()], HashMap::new()).unwrap();
        assert_eq!(functions.len(), DEFAULT_FUNCTIONS.len() - 1);
        assert!(!functions.contains_key("sin"));
        assert!(functions.contains_key("cos"));
    }

    #[test]
    fn whitelist_and_blacklist_are_mutually_exclusive() {
        let err = build_functions(
            &[Some("sin".into())],
            &["cos".into()],
            HashMap::new(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::WhitelistAndBlacklist);
    }

    #[test]
    fn unknown_names_fail_naming_the_entry() {
        let err =
            build_functions(&[Some("sine".into())], &[], HashMap::new()).unwrap_err();
        let ConfigError::UnknownWhitelistEntry { name, suggestions } = err else {
            panic!("expected an unknown-whitelist error");
        };
        assert_eq!(name, "sine");
        assert!(suggestions.contains(&"sin".to_string()));

        let err =
            build_functions(&[], &["frobnicate".into()], HashMap::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownBlacklistEntry { ref name, .. } if name == "frobnicate"
        ));
    }

    #[test]
    fn user_functions_take_precedence_by_name() {
        let user = HashMap::from([(
            "sin".to_string(),
            UserFunction::Fixed(constant_fn("sin", 1.0)),
        )]);
        let (functions, _) = build_functions(&[], &[], user).unwrap();
        assert_eq!(
            functions["sin"].eval(&[Value::Float(0.0)]).unwrap(),
            Value::Float(1.0)
        );
    }

    #[test]
    fn choice_lists_land_in_the_randomized_map() {
        let user = HashMap::from([(
            "f".to_string(),
            UserFunction::Choices(vec![constant_fn("f", 1.0), constant_fn("f", 2.0)]),
        )]);
        let (functions, random) = build_functions(&[None], &[], user).unwrap();
        assert!(functions.is_empty());
        let drawn = random["f"].gen_sample();
        let Value::Float(x) = drawn.eval(&[Value::Float(0.0)]).unwrap() else {
            panic!("expected a real result");
        };
        assert!(x == 1.0 || x == 2.0);
    }

    #[test]
    fn empty_choice_lists_are_rejected() {
        let user = HashMap::from([("f".to_string(), UserFunction::Choices(vec![]))]);
        let err = build_functions(&[], &[], user).unwrap_err();
        assert_eq!(err, ConfigError::EmptyFunctionList("f".into()));
    }

    #[test]
    fn samplers_are_stored_as_is() {
        #[derive(Debug)]
        struct AlwaysSin;

        impl FunctionSamplingSet for AlwaysSin {
            fn gen_sample(&self) -> Arc<dyn Builtin> {
                Arc::clone(&DEFAULT_FUNCTIONS["sin"])
            }
        }

        let user = HashMap::from([(
            "f".to_string(),
            UserFunction::Sampler(Arc::new(AlwaysSin)),
        )]);
        let (_, random) = build_functions(&[], &[], user).unwrap();
        let drawn = random["f"].gen_sample();
        assert_eq!(drawn.eval(&[Value::Float(0.0)]).unwrap(), Value::Float(0.0));
    }

    #[test]
    fn bad_user_names_are_rejected() {
        let user = HashMap::from([(
            "2fast".to_string(),
            UserFunction::Fixed(constant_fn("2fast", 0.0)),
        )]);
        let err = build_functions(&[], &[], user).unwrap_err();
        assert_eq!(err, ConfigError::InvalidName("2fast".into()));

        let constants = HashMap::from([(String::new(), Value::Float(1.0))]);
        let err = build_constants(&constants).unwrap_err();
        assert_eq!(err, ConfigError::InvalidName(String::new()));
    }

    #[test]
    fn constants_builder_copies_then_overrides() {
        let base = build_constants(&HashMap::new()).unwrap();
        assert_eq!(base.len(), 4);
        assert!(base.contains_key("pi"));

        let user = HashMap::from([("T".to_string(), Value::Float(1.5))]);
        let extended = build_constants(&user).unwrap();
        assert_eq!(extended.len(), 5);
        assert_eq!(extended["T"], Value::Float(1.5));
        assert_eq!(extended["pi"], base["pi"]);
    }

    #[test]
    fn suffix_builder() {
        let base = build_suffixes(false);
        assert_eq!(base.len(), 1);
        assert_eq!(base[&'%'], 0.01);

        let metric = build_suffixes(true);
        assert_eq!(metric[&'G'], 1e9);
        assert_eq!(metric[&'%'], 0.01);
        assert_eq!(metric.len(), 9);
    }

    #[test]
    fn guarded_entries_survive_the_copy() {
        let (functions, _) = build_functions(&[], &[], HashMap::new()).unwrap();
        let err = functions["cos"]
            .eval(&[Value::from(vec![1.0, 2.0])])
            .unwrap_err();
        assert!(matches!(err, EvalError::Domain { ref name } if name == "cos"));
    }
}

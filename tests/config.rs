use std::{fs, path::PathBuf, process};

use ndarray::array;
use perceptron::{
    PerceptronErr, RunConfig, config::DatasetConfig, initialization::WeightInit, trace::NullSink,
};

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("perceptron-{}-{name}", process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_and_runs_a_config_file() {
    let path = scratch_file(
        "or.json",
        r#"{
            "epochs": 4,
            "learning_rate": 0.25,
            "init": { "kind": "explicit", "weights": [-0.05, -0.02, 0.02] },
            "dataset": {
                "x_size": 3,
                "data": [
                    -1, 0, 0, 0,
                    -1, 0, 1, 1,
                    -1, 1, 0, 1,
                    -1, 1, 1, 1
                ]
            }
        }"#,
    );

    let config = RunConfig::from_path(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config, RunConfig::or_gate());
    assert_eq!(config.run(&mut NullSink).unwrap(), array![0.2, 0.23, 0.27]);
}

#[test]
fn seeded_uniform_init_is_reproducible() {
    let json = r#"{
        "seed": 7,
        "init": { "kind": "uniform", "low": -0.5, "high": 0.5 },
        "dataset": { "x_size": 3, "data": [-1, 0, 0, 0, -1, 1, 1, 1] }
    }"#;

    let a = RunConfig::from_json_str(json).unwrap();
    let b = RunConfig::from_json_str(json).unwrap();

    assert_eq!(a.initial_weights().unwrap(), b.initial_weights().unwrap());
    assert_eq!(a.initial_weights().unwrap().len(), 3);
    assert_eq!(a.run(&mut NullSink).unwrap(), b.run(&mut NullSink).unwrap());
}

#[test]
fn explicit_weights_of_the_wrong_length_abort_the_run() {
    let config = RunConfig::from_json_str(
        r#"{
            "init": { "kind": "explicit", "weights": [0.1, 0.2] },
            "dataset": { "x_size": 3, "data": [-1, 0, 0, 0] }
        }"#,
    )
    .unwrap();

    assert!(matches!(
        config.run(&mut NullSink),
        Err(PerceptronErr::DimensionMismatch {
            got: 3,
            expected: 2
        })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("perceptron-this-file-does-not-exist.json");
    assert!(matches!(RunConfig::from_path(path), Err(PerceptronErr::Io(_))));
}

#[test]
fn malformed_dataset_is_reported() {
    let res = RunConfig::from_json_str(
        r#"{
            "init": { "kind": "const", "value": 0.0 },
            "dataset": { "x_size": 3, "data": [-1, 0, 0, 0, -1, 0] }
        }"#,
    );

    assert!(matches!(res, Err(PerceptronErr::InvalidConfig(_))));
}

#[test]
fn overflowing_x_size_is_an_error() {
    let res = RunConfig::from_json_str(
        r#"{
            "init": { "kind": "const", "value": 0.0 },
            "dataset": { "x_size": 18446744073709551615, "data": [] }
        }"#,
    );

    assert!(matches!(res, Err(PerceptronErr::InvalidConfig(_))));
}

#[test]
fn hand_built_config_is_validated_before_running() {
    let mut config = RunConfig::or_gate();
    config.init = WeightInit::Const { value: 0.0 };
    config.dataset = DatasetConfig {
        x_size: usize::MAX,
        data: vec![],
    };

    assert!(matches!(
        config.run(&mut NullSink),
        Err(PerceptronErr::InvalidConfig(_))
    ));
}

use minitrees::{CategoricalNB, MiniTreesError, Sample};

use polars::prelude::*;


// Same weather table as `tests/tree.rs`.
fn weather() -> Sample {
    let outlook = Series::new("Outlook", &[
        "Sunny", "Sunny", "Overcast", "Rain", "Rain", "Rain", "Overcast",
        "Sunny", "Sunny", "Rain", "Sunny", "Overcast", "Overcast", "Rain",
    ]);
    let temperature = Series::new("Temperature", &[
        "Hot", "Hot", "Hot", "Mild", "Cool", "Cool", "Cool",
        "Mild", "Cool", "Mild", "Mild", "Mild", "Hot", "Mild",
    ]);
    let humidity = Series::new("Humidity", &[
        "High", "High", "High", "High", "Normal", "Normal", "Normal",
        "High", "Normal", "Normal", "Normal", "High", "Normal", "High",
    ]);
    let wind = Series::new("Wind", &[
        "Weak", "Strong", "Weak", "Weak", "Weak", "Strong", "Strong",
        "Weak", "Weak", "Weak", "Strong", "Strong", "Weak", "Strong",
    ]);
    let play = Series::new("Play", &[
        "No", "No", "Yes", "Yes", "Yes", "No", "Yes",
        "No", "Yes", "Yes", "Yes", "Yes", "Yes", "No",
    ]);

    let df = DataFrame::new(
        vec![outlook, temperature, humidity, wind, play]
    ).unwrap();

    Sample::from_dataframe(df).unwrap()
        .set_target("Play").unwrap()
}


#[test]
fn model_counts_the_classes() {
    let sample = weather();
    let model = CategoricalNB::fit(&sample).unwrap();

    assert_eq!(model.target_name(), "Play");
    assert_eq!(model.classes().collect::<Vec<_>>(), vec!["No", "Yes"]);
    assert_eq!(model.class_count("Yes"), 9);
    assert_eq!(model.class_count("No"), 5);
}


#[test]
fn classic_case_prefers_no() {
    let sample = weather();
    let model = CategoricalNB::fit(&sample).unwrap();

    let case = [
        ("Outlook", "Sunny"),
        ("Temperature", "Cool"),
        ("Humidity", "High"),
        ("Wind", "Strong"),
    ];
    let posterior = model.posterior(&case).unwrap();

    // Yes: 2/9 * 3/9 * 3/9 * 3/9 * 9/14
    // No:  3/5 * 1/5 * 4/5 * 3/5 * 5/14
    assert!((posterior.likelihood("Yes") - 0.005291).abs() < 1e-5);
    assert!((posterior.likelihood("No") - 0.020571).abs() < 1e-5);

    assert_eq!(posterior.prediction(), Some("No"));
    assert!((posterior.probability("No") - 0.795).abs() < 1e-3);
    assert!(!posterior.is_degenerate());
}


#[test]
fn likelihood_terms_end_with_the_prior() {
    let sample = weather();
    let model = CategoricalNB::fit(&sample).unwrap();

    let case = [("Outlook", "Sunny")];
    let posterior = model.posterior(&case).unwrap();

    assert_eq!(
        posterior.terms("Yes").unwrap(),
        &["2/9".to_string(), "9/14".to_string()],
    );
    assert_eq!(
        posterior.terms("No").unwrap(),
        &["3/5".to_string(), "5/14".to_string()],
    );
}


#[test]
fn zero_count_degenerates_and_smoothing_recovers() {
    let sample = weather();
    let model = CategoricalNB::fit(&sample).unwrap();

    // `Overcast` never occurs under `No`,
    // so the raw posterior collapses to 0% / 100%.
    let case = [("Outlook", "Overcast")];
    let posterior = model.posterior(&case).unwrap();
    assert_eq!(posterior.probability("No"), 0.0);
    assert_eq!(posterior.probability("Yes"), 1.0);
    assert!(posterior.is_degenerate());

    // Add-1 smoothing over the 3 Outlook values.
    let smoothed = model.posterior_laplace(&case, 1).unwrap();
    assert!(!smoothed.is_degenerate());

    // No:  (0+1)/(5+3) * 5/14,  Yes: (4+1)/(9+3) * 9/14
    let no = 1.0 / 8.0 * 5.0 / 14.0;
    let yes = 5.0 / 12.0 * 9.0 / 14.0;
    assert!((smoothed.likelihood("No") - no).abs() < 1e-9);
    assert!((smoothed.likelihood("Yes") - yes).abs() < 1e-9);

    assert_eq!(
        smoothed.terms("No").unwrap(),
        &["(0+1)/(5+3)".to_string(), "5/14".to_string()],
    );
    assert_eq!(smoothed.prediction(), Some("Yes"));
}


#[test]
fn probabilities_sum_to_one() {
    let sample = weather();
    let model = CategoricalNB::fit(&sample).unwrap();

    let case = [("Humidity", "Normal"), ("Wind", "Weak")];
    let posterior = model.posterior(&case).unwrap();

    let total = posterior.probabilities()
        .map(|(_, p)| p)
        .sum::<f64>();
    assert!((total - 1.0).abs() < 1e-9);
}


#[test]
fn unknown_attribute_is_rejected() {
    let sample = weather();
    let model = CategoricalNB::fit(&sample).unwrap();

    let case = [("Pressure", "Low")];
    let err = model.posterior(&case).unwrap_err();
    assert!(matches!(err, MiniTreesError::AttributeNotFound(_)));
}


#[test]
fn unset_target_is_rejected() {
    let a = Series::new("A", &["x"]);
    let df = DataFrame::new(vec![a]).unwrap();
    let sample = Sample::from_dataframe(df).unwrap();

    let err = CategoricalNB::fit(&sample).unwrap_err();
    assert!(matches!(err, MiniTreesError::TargetNotSet));
}


#[test]
fn empty_sample_is_rejected() {
    let a = Series::new("A", Vec::<&str>::new());
    let class = Series::new("class", Vec::<&str>::new());
    let df = DataFrame::new(vec![a, class]).unwrap();
    let sample = Sample::from_dataframe(df).unwrap()
        .set_target("class").unwrap();

    let err = CategoricalNB::fit(&sample).unwrap_err();
    assert!(matches!(err, MiniTreesError::EmptySample));
}

use std::time::{Duration, Instant};

use u_tsp::constructive::{build_tour, BuilderConfig, StartPolicy};
use u_tsp::distance::{Distances, Metric};
use u_tsp::local_search::{two_opt, Termination, TwoOptConfig};
use u_tsp::models::Instance;
use u_tsp::partition::GridResolution;
use u_tsp::quality::KnownOptima;
use u_tsp::solver::{solve, SolverConfig};
use u_tsp::tsplib;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn unit_square_is_built_optimally_and_left_alone() {
    init_tracing();
    let inst = Instance::from_points(
        "unit-square",
        &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
    )
    .expect("valid");
    let dm = Distances::dense(&inst, Metric::Euclidean);
    let config = BuilderConfig::default()
        .with_resolution(GridResolution::single())
        .with_start(StartPolicy::Node(1));

    let built = build_tour(&inst, &dm, &config).expect("valid config");
    assert_eq!(built.tour.sequence(), vec![1, 2, 3, 4, 1]);
    assert!((built.cost - 4.0).abs() < 1e-10);

    let opt = TwoOptConfig::default().with_time_budget(Duration::from_secs(30));
    let result = two_opt(&inst, &dm, built.tour, &opt).expect("valid tour");
    assert!((result.cost - 4.0).abs() < 1e-10);
    assert_eq!(result.termination, Termination::LocalOptimum);
    assert_eq!(result.sweeps, 1);
    assert!(result.elapsed < Duration::from_secs(1));
}

#[test]
fn collinear_nodes_need_no_correction() {
    init_tracing();
    let inst = Instance::from_points("collinear", &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])
        .expect("valid");
    for metric in [Metric::Euclidean, Metric::Chebyshev] {
        let dm = Distances::dense(&inst, metric);
        let config = BuilderConfig::default().with_start(StartPolicy::Node(1));
        let built = build_tour(&inst, &dm, &config).expect("valid config");
        assert!((built.cost - 4.0).abs() < 1e-10);

        let opt = TwoOptConfig::default().with_time_budget(Duration::from_secs(5));
        let result = two_opt(&inst, &dm, built.tour, &opt).expect("valid tour");
        assert_eq!(result.moves, 0);
        assert!((result.cost - 4.0).abs() < 1e-10);
    }
}

#[test]
fn budget_bounds_runtime_on_large_instance() {
    init_tracing();
    let n = 3000;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let t = i as f64;
            ((t * 12.9898).sin() * 43758.5453 % 1000.0, (t * 78.233).cos() * 12345.678 % 1000.0)
        })
        .collect();
    let inst = Instance::from_points("large", &points).expect("valid");
    let config = SolverConfig::default()
        .with_dense_limit(0)
        .with_two_opt(TwoOptConfig::default().with_time_budget(Duration::from_millis(100)));

    let started = Instant::now();
    let report = solve(&inst, &config).expect("valid");
    let two_opt_time = report.optimization.as_ref().expect("2-opt ran").elapsed;

    assert!(two_opt_time < Duration::from_millis(100) + Duration::from_millis(500));
    assert!(started.elapsed() >= two_opt_time);
    assert!(report.tour.validate(&inst).is_ok());
    assert!(report.cost <= report.construction_cost + 1e-9);
}

#[test]
fn tsplib_to_gap_report() {
    init_tracing();
    let text = "NAME : tsp225\nTYPE : TSP\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n\
                1 0 0\n2 10 0\n3 10 10\n4 0 10\n5 5 5\nEOF\n";
    let doc = tsplib::parse(text).expect("well-formed");
    let metric = doc.metric().unwrap_or_default();
    let config = SolverConfig::default()
        .with_metric(metric)
        .with_two_opt(TwoOptConfig::default().with_time_budget(Duration::from_secs(2)));

    let report = solve(&doc.instance, &config).expect("valid");
    assert_eq!(report.name, "tsp225");
    assert_eq!(report.tour.len(), 5);

    let gap = report.gap(&KnownOptima::benchmarks()).expect("registered");
    let expected = (report.cost / 3919.0 - 1.0) * 100.0;
    assert!((gap - expected).abs() < 1e-9);
}

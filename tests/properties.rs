use geo_aco::aco::{AcoConfig, AcoRunner, Ant, PheromoneMatrix};
use geo_aco::distance::DistanceMatrix;
use geo_aco::evaluation::TourEvaluator;
use geo_aco::models::{Point, Tour};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn points_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-80.0f64..80.0, -179.0f64..179.0), min..=max)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distance_matrix_symmetric_zero_diagonal(points in points_strategy(0, 20)) {
        let dm = DistanceMatrix::from_points(&points);
        prop_assert_eq!(dm.size(), points.len());
        prop_assert!(dm.is_symmetric(0.0));
        prop_assert!(dm.has_zero_diagonal());
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                prop_assert!(dm.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn constructed_tours_are_permutations(points in points_strategy(2, 15), seed in any::<u64>()) {
        let dm = DistanceMatrix::from_points(&points);
        let pheromone = PheromoneMatrix::new(dm.size(), 1.0);
        let ant = Ant::new(&dm, &pheromone, 1.5, 1.2);
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = ant.construct(&mut rng);
        prop_assert!(Tour::new(nodes, 0.0).is_valid(points.len()));
    }

    #[test]
    fn evaluator_sums_consecutive_pairs(points in points_strategy(2, 12), seed in any::<u64>()) {
        let dm = DistanceMatrix::from_points(&points);
        let pheromone = PheromoneMatrix::new(dm.size(), 1.0);
        let nodes = Ant::new(&dm, &pheromone, 1.0, 1.0).construct(&mut StdRng::seed_from_u64(seed));

        let mut expected = 0.0;
        for k in 0..nodes.len() - 1 {
            expected += dm.get(nodes[k], nodes[k + 1]);
        }
        prop_assert_eq!(TourEvaluator::new(&dm).length(&nodes), expected);
    }

    #[test]
    fn pheromone_stays_symmetric_and_non_negative(
        points in points_strategy(2, 10),
        evaporation in 0.01f64..0.99,
        deposit in 0.1f64..100.0,
        rounds in 1usize..30,
        seed in any::<u64>(),
    ) {
        let dm = DistanceMatrix::from_points(&points);
        let evaluator = TourEvaluator::new(&dm);
        let mut pheromone = PheromoneMatrix::new(dm.size(), 1.0);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..rounds {
            let tours: Vec<Tour> = {
                let ant = Ant::new(&dm, &pheromone, 1.5, 1.2);
                (0..3).map(|_| evaluator.build_tour(ant.construct(&mut rng))).collect()
            };
            pheromone.update(&tours, evaporation, deposit);
            prop_assert!(pheromone.is_symmetric());
            prop_assert!(pheromone.is_non_negative());
        }
    }

    #[test]
    fn running_best_never_increases(points in points_strategy(3, 10), seed in any::<u64>()) {
        let config = AcoConfig::default().with_ants(4).with_iterations(15);
        let mut rng = StdRng::seed_from_u64(seed);
        let result = AcoRunner::run(&points, &config, &mut rng).unwrap();
        prop_assert_eq!(result.history.len(), 15);
        prop_assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn normalized_result_is_origin_first(points in points_strategy(2, 10), seed in any::<u64>()) {
        let config = AcoConfig::default().with_iterations(5);
        let mut rng = StdRng::seed_from_u64(seed);
        let result = AcoRunner::run(&points, &config, &mut rng).unwrap();
        let labels = result.tour.labels();
        prop_assert_eq!(labels.len(), points.len() + 1);
        prop_assert_eq!(labels[0], 1);
        prop_assert_eq!(labels[labels.len() - 1], 1);
        let indices = result.tour.indices().expect("1-based labels");
        prop_assert!(Tour::new(indices, result.length()).is_valid(points.len()));
    }

    #[test]
    fn seeded_runs_reproduce(points in points_strategy(2, 8), seed in any::<u64>()) {
        let config = AcoConfig::default().with_iterations(8);
        let a = AcoRunner::run(&points, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = AcoRunner::run(&points, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a.tour, b.tour);
        prop_assert_eq!(a.history, b.history);
    }
}

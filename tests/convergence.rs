use shallownet::{Logging, Mlp, NetConfig, Network, Rbf};

const INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
const SUMS: [[f64; 1]; 4] = [[0.0], [1.0], [1.0], [2.0]];
const XOR: [[f64; 1]; 4] = [[0.0], [1.0], [1.0], [0.0]];

fn config(seed: u64) -> NetConfig {
    NetConfig::default().seed(seed).logging(Logging::Silent)
}

/// Mean of the per-sample half squared errors.
fn mean_error<N: Network>(net: &mut N, inputs: &[[f64; 2]], targets: &[[f64; 1]]) -> f64 {
    let mut total = 0.0;
    for (input, target) in inputs.iter().zip(targets.iter()) {
        net.forward(input).unwrap();
        total += net.calc_error(target);
    }
    total / inputs.len() as f64
}

#[test]
fn mlp_learns_sums() {
    let mut net = Mlp::with_config(2, 4, 1, true, config(0));
    net.train(&INPUTS, &SUMS, 1).unwrap();
    let after_one = mean_error(&mut net, &INPUTS, &SUMS);
    net.train(&INPUTS, &SUMS, 999).unwrap();
    let after_all = mean_error(&mut net, &INPUTS, &SUMS);
    assert!(after_all < 0.05);
    assert!(after_all < after_one);
}

#[test]
fn mlp_learns_xor() {
    let fast = config(0).learning_rate(0.7).momentum(0.3);
    let mut net = Mlp::with_config(2, 4, 1, false, fast);
    net.train(&INPUTS, &XOR, 1000).unwrap();
    for (input, target) in INPUTS.iter().zip(XOR.iter()) {
        let output = net.forward(input).unwrap()[0];
        assert!((output - target[0]).abs() < 0.2, "{:?} -> {}", input, output);
    }
}

#[test]
fn rbf_learns_sums() {
    let mut net = Rbf::with_config(2, 1, 4, true, config(8));
    net.train(&INPUTS, &SUMS, 1).unwrap();
    let after_one = mean_error(&mut net, &INPUTS, &SUMS);
    net.train(&INPUTS, &SUMS, 999).unwrap();
    let after_all = mean_error(&mut net, &INPUTS, &SUMS);
    assert!(after_all < 0.05);
    assert!(after_all < after_one);
}

#[test]
fn rbf_learns_xor_with_a_center_per_sample() {
    let mut net = Rbf::with_config(2, 1, 4, true, config(2));
    net.train(&INPUTS, &XOR, 1000).unwrap();
    for (input, target) in INPUTS.iter().zip(XOR.iter()) {
        let output = net.forward(input).unwrap()[0];
        assert!((output - target[0]).abs() < 0.1, "{:?} -> {}", input, output);
    }
}

#[test]
fn classification_outputs_stay_in_unit_interval() {
    let mut mlp = Mlp::with_config(2, 3, 2, false, config(1));
    let mut rbf = Rbf::with_config(2, 2, 3, false, config(1));
    let targets = [[0.0, 1.0], [1.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    mlp.train(&INPUTS, &targets, 100).unwrap();
    rbf.train(&INPUTS, &targets, 100).unwrap();

    for input in &[[0.0, 0.0], [0.5, 0.5], [-3.0, 4.0]] {
        assert!(mlp.forward(input).unwrap().iter().all(|&o| o > 0.0 && o < 1.0));
        assert!(rbf.forward(input).unwrap().iter().all(|&o| o > 0.0 && o < 1.0));
    }
}

#[test]
fn rbf_trains_with_fewer_centers_than_samples() {
    let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
    let targets = [[0.0], [1.0], [1.0], [2.0], [4.0]];
    let mut net = Rbf::with_config(2, 1, 4, true, config(6));
    net.train(&inputs, &targets, 1000).unwrap();
    assert_eq!(net.centers().len(), 4);
    for input in &inputs {
        assert!(net.forward(input).unwrap()[0].is_finite());
    }
}

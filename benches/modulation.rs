use criterion::Criterion;
use halo_profile_bias::ndarray::Array1;
use halo_profile_bias::prelude::*;
use halo_profile_bias::{
    Anchors, HaloProfileVocabulary, InterpolationMethod, ProfileInput, RadProfBias,
};
use rand::prelude::*;
use std::hint::black_box;

fn random_conc(n: usize) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n).map(|_| rng.random_range(2.0..20.0)).collect()
}

pub fn bench_interpolators(c: &mut Criterion) {
    const N: usize = 1000;

    let x = random_conc(N);
    let anchors = Anchors::new(vec![2.0, 4.0, 6.0, 9.0, 13.0, 20.0]).unwrap();
    let ordinates = [1.2, 1.1, 1.0, 0.9, 0.85, 0.8];

    for method in [
        InterpolationMethod::spline(1),
        InterpolationMethod::spline(3),
        InterpolationMethod::spline(5),
        InterpolationMethod::Polynomial,
    ] {
        let f = method.fit("conc", &anchors, &ordinates).unwrap();
        c.bench_function(format!("{method} interpolation, {N} points").as_str(), |b| {
            b.iter(|| f.eval_array(black_box(x.view())))
        });
        c.bench_function(format!("{method} fit").as_str(), |b| {
            b.iter(|| method.fit("conc", black_box(&anchors), black_box(&ordinates)))
        });
    }
}

pub fn bench_modulated_parameters(c: &mut Criterion) {
    const COUNTS: [usize; 3] = [100, 10_000, 1_000_000];

    let model = RadProfBias::from_tables(
        "satellites",
        &HaloProfileVocabulary::nfw(),
        [("conc", vec![2.0, 5.0, 10.0, 20.0], vec![1.2, 1.0, 0.9, 0.8])],
        InterpolationMethod::spline(3),
    )
    .unwrap();

    for &n in COUNTS.iter() {
        let conc = random_conc(n);
        c.bench_function(format!("Modulate {n} concentrations").as_str(), |b| {
            b.iter(|| {
                let input = ProfileInput::arrays([black_box(conc.view())]);
                model.modulated_parameters(&["conc"], &input)
            })
        });
    }
}

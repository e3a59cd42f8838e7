// cargo bench --bench constraint
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmimic::constraint::{ConstraintRevoluteUnaligned, MotionSubspace, ScaledConstraint};
use kmimic::{Force, Motion, Se3Action};
use nalgebra::{Isometry3, Matrix6xX, Translation3, Unit, UnitQuaternion, Vector3};

fn random_vector3() -> Vector3<f64> {
    Vector3::new(rand::random(), rand::random(), rand::random())
}

fn bench_se3_action(c: &mut Criterion) {
    let s = ConstraintRevoluteUnaligned::new(Unit::new_normalize(Vector3::new(1.5, 1.0, 0.0)));
    let scaled = ScaledConstraint::new(&s, 2.0);
    let m = Isometry3::from_parts(
        Translation3::from(random_vector3()),
        UnitQuaternion::from_scaled_axis(random_vector3()),
    );

    let mut group = c.benchmark_group("se3_action");
    group.bench_function("inner", |b| b.iter(|| black_box(&m).act_subspace(&s)));
    group.bench_function("scaled", |b| {
        b.iter(|| black_box(&m).act_subspace(&scaled))
    });
    group.bench_function("dense", |b| {
        b.iter(|| black_box(&m).action_matrix() * s.matrix())
    });
    group.finish();
}

fn bench_motion_action(c: &mut Criterion) {
    let s = ConstraintRevoluteUnaligned::new(Unit::new_normalize(Vector3::new(1.5, 1.0, 0.0)));
    let scaled = ScaledConstraint::new(&s, 2.0);
    let v = Motion::new(random_vector3(), random_vector3());

    let mut group = c.benchmark_group("motion_action");
    group.bench_function("inner", |b| b.iter(|| black_box(&v).cross_subspace(&s)));
    group.bench_function("scaled", |b| {
        b.iter(|| black_box(&v).cross_subspace(&scaled))
    });
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let s = ConstraintRevoluteUnaligned::new(Unit::new_normalize(Vector3::new(1.5, 1.0, 0.0)));
    let scaled = ScaledConstraint::new(&s, 2.0);
    let f = Matrix6xX::from_fn(20, |_, _| rand::random::<f64>());
    let force = Force::new(random_vector3(), random_vector3());

    let mut group = c.benchmark_group("transpose");
    group.bench_function("matrix", |b| b.iter(|| scaled.transpose() * black_box(&f)));
    group.bench_function("force", |b| {
        b.iter(|| scaled.transpose() * black_box(&force))
    });
    group.finish();
}

criterion_group!(benches, bench_se3_action, bench_motion_action, bench_transpose);
criterion_main!(benches);

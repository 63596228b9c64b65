use ferrograd_core::utils::testing::check_array_near;
use ferrograd_core::{ErrorKind, Literal, Nested, Selector, Value, ValueArray};
use approx::assert_relative_eq;

mod common;
use common::create_grid;

#[test]
fn test_literal_round_trip() {
    let literals: Vec<Literal> = vec![
        vec![1.0].into(),
        vec![1.01, 2.02].into(),
        vec![vec![1]].into(),
        vec![vec![vec![vec![1, 2], vec![3, 4]], vec![vec![5, 6], vec![7, 8]]]].into(),
    ];
    for literal in literals {
        let expected: Nested<f64> = to_plain(&literal);
        let array = ValueArray::from_literal(literal, None).unwrap();
        assert_eq!(array.to_nested(), expected);
        assert_eq!(array.to_nested().shape().unwrap(), array.shape());
    }
}

fn to_plain(literal: &Literal) -> Nested<f64> {
    match literal {
        Nested::Scalar(operand) => Nested::Scalar(operand.data()),
        Nested::List(items) => Nested::List(items.iter().map(to_plain).collect()),
    }
}

#[test]
fn test_fancy_index_on_grid() {
    let grid = create_grid(4, 4);
    let selected = grid
        .get(&[1.into(), vec![0, 2].into()])
        .unwrap()
        .into_array()
        .unwrap();
    check_array_near(&selected, &[2], &[4.0, 6.0], 1e-12);
}

#[test]
fn test_shape_unchanged_after_writes() {
    let mut grid = create_grid(4, 4);
    grid.set(&[(1..3).into(), (1..3).into()], vec![vec![0, 0], vec![0, 0]])
        .unwrap();
    assert_eq!(grid.shape(), &[4, 4]);

    let before = grid.to_flat();
    let err = grid
        .set(&[Selector::full(), 0.into()], vec![1, 2, 3])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert_eq!(grid.shape(), &[4, 4]);
    assert_eq!(grid.to_flat(), before);
}

#[test]
fn test_zero_grad_twice() {
    let weights = create_grid(2, 3);
    let loss: Value = weights.iter().map(|w| w.tanh()).sum();
    loss.backward();
    assert!(weights.grads().iter().any(|&g| g != 0.0));

    weights.zero_grad();
    assert!(weights.grads().iter().all(|&g| g == 0.0));
    weights.zero_grad();
    assert!(weights.grads().iter().all(|&g| g == 0.0));
}

#[test]
fn test_neuron_forward_backward_through_array() {
    // y = relu(w . x + b) with parameters stored in arrays
    let w = ValueArray::from_literal(vec![0.5, -1.0, 2.0], Some("w")).unwrap();
    let b = ValueArray::from_literal(0.25, Some("b")).unwrap();
    let x = [1.0, 2.0, 3.0];

    let pre: Value = w.iter().zip(x.iter()).map(|(wi, &xi)| wi * xi).sum::<Value>() + &b.values()[0];
    let y = pre.relu();
    assert_relative_eq!(y.data(), 0.5 - 2.0 + 6.0 + 0.25);

    y.backward();
    assert_eq!(w.grads(), vec![1.0, 2.0, 3.0]);
    assert_eq!(b.grads(), vec![1.0]);

    // SGD step performed by the caller on the backing nodes.
    for param in w.iter().chain(b.iter()) {
        param.set_data(param.data() - 0.1 * param.grad());
    }
    check_array_near(&w, &[3], &[0.4, -1.2, 1.7], 1e-12);
    w.zero_grad();
    b.zero_grad();
    assert!(w.grads().iter().chain(b.grads().iter()).all(|&g| g == 0.0));
}

#[test]
fn test_slice_shares_graph_with_source() {
    let grid = create_grid(3, 3);
    let diag: Vec<Value> = (0..3)
        .map(|i| {
            grid.get(&[i.into(), i.into()])
                .unwrap()
                .into_scalar()
                .unwrap()
        })
        .collect();
    let trace: Value = diag.iter().sum();
    trace.backward();
    assert_relative_eq!(trace.data(), 0.0 + 4.0 + 8.0);
    assert_eq!(
        grid.grads(),
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
    );
}

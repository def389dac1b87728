use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use stepgraph::{
    algo::*,
    commands::{BoxedCommand, CommandHistory},
    display::*,
    gens::*,
    prelude::*,
    utils::UnionFind,
};

/// Array commands, resolved against the length the array has when the command runs
#[derive(Clone, Debug)]
enum ArrayOp {
    Set(usize, i32),
    Increment(usize, i32),
    Swap(usize, usize),
    Push(i32),
    Pop,
    Active(usize),
    Class(usize),
    Pointer(usize),
    ClearPointers,
}

fn array_op() -> impl Strategy<Value = ArrayOp> {
    prop_oneof![
        (any::<usize>(), -50..50i32).prop_map(|(i, v)| ArrayOp::Set(i, v)),
        (any::<usize>(), -5..5i32).prop_map(|(i, d)| ArrayOp::Increment(i, d)),
        (any::<usize>(), any::<usize>()).prop_map(|(i, j)| ArrayOp::Swap(i, j)),
        (-50..50i32).prop_map(ArrayOp::Push),
        Just(ArrayOp::Pop),
        any::<usize>().prop_map(ArrayOp::Active),
        any::<usize>().prop_map(ArrayOp::Class),
        any::<usize>().prop_map(ArrayOp::Pointer),
        Just(ArrayOp::ClearPointers),
    ]
}

/// Builds the commands for `ops`, keeping every index in bounds and the array non-empty
fn array_history(initial: usize, ops: &[ArrayOp]) -> CommandHistory<ArrayDisplay<i32>> {
    let mut len = initial;
    let mut history = CommandHistory::new();
    for op in ops {
        let command: BoxedCommand<ArrayDisplay<i32>> = match *op {
            ArrayOp::Set(i, v) => Box::new(ArraySetValue::new(i % len, v)),
            ArrayOp::Increment(i, d) => Box::new(ArrayIncrementValue::new(i % len, d)),
            ArrayOp::Swap(i, j) => Box::new(ArraySwap::new(i % len, j % len)),
            ArrayOp::Push(v) => {
                len += 1;
                Box::new(ArrayPush::new(v))
            }
            ArrayOp::Pop if len > 1 => {
                len -= 1;
                Box::new(ArrayPop::<i32>::new())
            }
            ArrayOp::Pop => continue,
            ArrayOp::Active(i) => Box::new(ArraySetActive::<i32>::new(i % len)),
            ArrayOp::Class(i) => Box::new(ArrayAddClass::new(i % len, "sorted")),
            ArrayOp::Pointer(i) => Box::new(ArraySetPointer::new("i", Some(i % len))),
            ArrayOp::ClearPointers => Box::new(ArrayResetPointers::new()),
        };
        history.push(command);
    }
    history
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn union_find_matches_components(
        n in 1u32..30,
        pairs in prop::collection::vec((0u32..30, 0u32..30), 0..60),
    ) {
        let pairs = pairs
            .into_iter()
            .filter(|&(u, v)| u < n && v < n)
            .collect::<Vec<_>>();

        let mut uf = UnionFind::new(n);
        let mut merges = 0;
        for &(u, v) in &pairs {
            if uf.union(u, v) {
                merges += 1;
            }
        }

        let graph = Graph::from_edges(n, false, pairs.iter().copied());
        let labels = graph.connected_components();
        prop_assert_eq!(graph.connected_component_sets().len() as u32, n - merges);
        for u in 0..n {
            for v in 0..n {
                prop_assert_eq!(uf.same_set(u, v), labels[u as usize] == labels[v as usize]);
            }
        }
    }

    #[test]
    fn array_run_and_reset_restore_scene(
        values in prop::collection::vec(-50..50i32, 1..8),
        ops in prop::collection::vec(array_op(), 0..40),
    ) {
        let mut display = ArrayDisplay::new(values.clone());
        let initial = display.scene().clone();
        let mut history = array_history(values.len(), &ops);

        history.run(&mut display);
        prop_assert!(history.done());
        let finished = display.scene().clone();

        history.reset(&mut display);
        prop_assert!(!history.in_progress());
        prop_assert_eq!(display.scene(), &initial);

        history.run(&mut display);
        prop_assert_eq!(display.scene(), &finished);
    }

    #[test]
    fn goto_matches_single_steps(
        values in prop::collection::vec(-50..50i32, 1..8),
        ops in prop::collection::vec(array_op(), 1..30),
        targets in prop::collection::vec(0usize..40, 1..6),
    ) {
        let mut jumped = ArrayDisplay::new(values.clone());
        let mut jumping = array_history(values.len(), &ops);

        for k in targets {
            jumping.goto_command(&mut jumped, k);
            let k = k.min(jumping.len());
            prop_assert_eq!(jumping.current(), k);

            let mut stepped = ArrayDisplay::new(values.clone());
            let mut stepping = array_history(values.len(), &ops);
            for _ in 0..k {
                prop_assert!(stepping.next(&mut stepped, false));
            }
            prop_assert_eq!(jumped.scene(), stepped.scene());
        }
    }

    #[test]
    fn random_connected_has_exact_edges(n in 1u32..25, extra in 0u32..30, seed in any::<u64>()) {
        let max = n * (n - 1) / 2;
        let m = (n - 1 + extra).min(max);
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let graph = RandomConnected::new().nodes(n).edges(m).generate(rng);

        prop_assert_eq!(graph.number_of_nodes(), n);
        prop_assert_eq!(graph.number_of_edges(), m);
        prop_assert!(graph.connected());
        prop_assert!(graph.vertices().all(|u| !graph.has_self_loop(u)));
    }

    #[test]
    fn random_dag_sorts_topologically(n in 1u32..25, m in 0u32..60, seed in any::<u64>()) {
        let m = m.min(n * (n - 1) / 2);
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let (graph, hidden) = RandomDag::new().nodes(n).edges(m).generate_with_order(rng);

        let order = graph.topological_sort();
        prop_assert_eq!(order.len(), n as usize);

        let mut rank = vec![0; n as usize];
        for (i, &u) in order.iter().enumerate() {
            rank[u as usize] = i;
        }
        let mut hidden_rank = vec![0; n as usize];
        for (i, &u) in hidden.iter().enumerate() {
            hidden_rank[u as usize] = i;
        }
        for Edge(u, v) in graph.edges(false) {
            prop_assert!(rank[u as usize] < rank[v as usize]);
            prop_assert!(hidden_rank[u as usize] < hidden_rank[v as usize]);
        }
    }
}

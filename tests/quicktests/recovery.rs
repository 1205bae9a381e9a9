use bintree::{Order, Tree};

fn keys(tree: &Tree<i16, i16>, order: Order) -> Vec<i16> {
    tree.to_vec(order).into_iter().map(|(k, _)| *k).collect()
}

#[quickcheck]
fn recovers_any_tree(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let pre = keys(&tree, Order::Klr);
    let ino = keys(&tree, Order::Lkr);

    match Tree::recover(&pre, &ino) {
        Ok(recovered) => {
            recovered == tree
                && keys(&recovered, Order::Lrk) == keys(&tree, Order::Lrk)
                && recovered.len() == tree.len()
        }
        Err(_) => false,
    }
}

#[quickcheck]
fn recovers_from_text(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let join = |order| {
        keys(&tree, order)
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    Tree::<i16, i16>::recover_from_text(&join(Order::Klr), &join(Order::Lkr))
        .map(|recovered| recovered == tree)
        .unwrap_or(false)
}

#[quickcheck]
fn truncated_preorder_rejected(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let mut pre = keys(&tree, Order::Klr);
    let ino = keys(&tree, Order::Lkr);
    if pre.pop().is_none() {
        return true;
    }

    Tree::recover(&pre, &ino).is_err()
}

use bintree::{ErrorCode, Order, Tree};

fn build<V: Clone>(pairs: &[(i32, V)]) -> Tree<i32, V> {
    let mut tree = Tree::new();
    for (k, v) in pairs {
        tree.insert(*k, v.clone());
    }
    tree
}

#[quickcheck]
fn round_trip_numbers(pairs: Vec<(i32, i64)>) -> bool {
    let tree = build(&pairs);
    let text = tree.to_string();

    match text.parse::<Tree<i32, i64>>() {
        Ok(decoded) => {
            decoded == tree
                && decoded.to_vec(Order::Klr) == tree.to_vec(Order::Klr)
                && decoded.len() == tree.len()
                && Tree::<i32, i64>::is_valid_tree_string(&text)
        }
        Err(_) => false,
    }
}

#[quickcheck]
fn round_trip_any_string(pairs: Vec<(i32, String)>) -> bool {
    let tree = build(&pairs);
    match tree.to_string().parse::<Tree<i32, String>>() {
        Ok(decoded) => decoded == tree && decoded.to_vec(Order::Lrk) == tree.to_vec(Order::Lrk),
        Err(_) => false,
    }
}

#[quickcheck]
fn encoding_is_one_line(pairs: Vec<(i32, u16)>) -> bool {
    !build(&pairs).to_string().contains('\n')
}

/// Swapping the keys of two nodes on a path keeps the text well formed but
/// breaks the ordering, which decoding must notice.
#[quickcheck]
fn swapped_keys_rejected(keys: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for k in &keys {
        tree.insert(*k, 0u8);
    }
    let sorted: Vec<i16> = tree.to_vec(Order::Lkr).into_iter().map(|(k, _)| *k).collect();
    if sorted.len() < 2 {
        return true;
    }
    let (lo, hi) = (sorted[0], sorted[sorted.len() - 1]);
    let text = tree
        .to_string()
        .replacen(&format!("){lo}:"), ")#:", 1)
        .replacen(&format!("){hi}:"), &format!("){lo}:"), 1)
        .replacen(")#:", &format!("){hi}:"), 1);

    text.parse::<Tree<i16, u8>>()
        .map_err(|e| e.code() == ErrorCode::InvalidPath)
        .err()
        .unwrap_or(false)
}

#[quickcheck]
fn round_trip_any_string_keys(pairs: Vec<(String, i32)>) -> bool {
    let mut tree = Tree::new();
    for (k, v) in pairs {
        tree.insert(k, v);
    }
    match tree.to_string().parse::<Tree<String, i32>>() {
        Ok(decoded) => decoded.to_vec(Order::Klr) == tree.to_vec(Order::Klr),
        Err(_) => false,
    }
}

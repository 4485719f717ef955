//! Function-combination primitives.
//!
//! Two tools carry every image combinator in this crate:
//!
//! - `compose` chains unary functions left to right, so
//!   `compose!(f, g, h)(x) == h(g(f(x)))`.
//! - `lift` feeds one input to several unary functions and hands their
//!   results, in order, to a combiner: `lift3(h, f, g, k)(p) == h(f(p), g(p), k(p))`.
//!
//! With these, a combinator states only its pointwise rule; the plumbing of
//! "sample every sub-image at the same point" lives here.

/// The identity function.
pub fn identity<T>() -> impl Fn(T) -> T + Copy + Send + Sync {
    |x| x
}

/// Compose two functions left to right: `compose2(f, g)(x) == g(f(x))`.
pub fn compose2<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// Compose a runtime sequence of endomorphisms left to right.
///
/// An empty sequence yields the identity.
pub fn compose_all<T>(fs: Vec<Box<dyn Fn(T) -> T + Send + Sync>>) -> impl Fn(T) -> T + Send + Sync {
    move |x| fs.iter().fold(x, |acc, f| f(acc))
}

/// Compose any number of functions left to right.
///
/// `compose!()` is the identity, `compose!(f)` behaves as `f`, and
/// `compose!(f, g, h)` behaves as `|x| h(g(f(x)))`.
#[macro_export]
macro_rules! compose {
    () => {
        |x| x
    };
    ($f:expr $(,)?) => {{
        let f = $f;
        move |x| f(x)
    }};
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let f = $f;
        let rest = $crate::compose!($($rest),+);
        move |x| rest(f(x))
    }};
}

/// Lift a unary combiner over one function: `h(f(p))`.
pub fn lift1<P, A, R, H, F>(h: H, f: F) -> impl Fn(P) -> R
where
    H: Fn(A) -> R,
    F: Fn(P) -> A,
{
    move |p| h(f(p))
}

/// Lift a binary combiner over two functions sharing a domain.
pub fn lift2<P, A, B, R, H, F1, F2>(h: H, f1: F1, f2: F2) -> impl Fn(P) -> R
where
    P: Clone,
    H: Fn(A, B) -> R,
    F1: Fn(P) -> A,
    F2: Fn(P) -> B,
{
    move |p: P| h(f1(p.clone()), f2(p))
}

/// Lift a ternary combiner over three functions sharing a domain.
pub fn lift3<P, A, B, C, R, H, F1, F2, F3>(h: H, f1: F1, f2: F2, f3: F3) -> impl Fn(P) -> R
where
    P: Clone,
    H: Fn(A, B, C) -> R,
    F1: Fn(P) -> A,
    F2: Fn(P) -> B,
    F3: Fn(P) -> C,
{
    move |p: P| h(f1(p.clone()), f2(p.clone()), f3(p))
}

/// Lift a quaternary combiner over four functions sharing a domain.
pub fn lift4<P, A, B, C, D, R, H, F1, F2, F3, F4>(
    h: H,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
) -> impl Fn(P) -> R
where
    P: Clone,
    H: Fn(A, B, C, D) -> R,
    F1: Fn(P) -> A,
    F2: Fn(P) -> B,
    F3: Fn(P) -> C,
    F4: Fn(P) -> D,
{
    move |p: P| h(f1(p.clone()), f2(p.clone()), f3(p.clone()), f4(p))
}

/// Lift a combiner over one to four functions, dispatching on arity.
#[macro_export]
macro_rules! lift {
    ($h:expr, $f1:expr $(,)?) => {
        $crate::functional::lift1($h, $f1)
    };
    ($h:expr, $f1:expr, $f2:expr $(,)?) => {
        $crate::functional::lift2($h, $f1, $f2)
    };
    ($h:expr, $f1:expr, $f2:expr, $f3:expr $(,)?) => {
        $crate::functional::lift3($h, $f1, $f2, $f3)
    };
    ($h:expr, $f1:expr, $f2:expr, $f3:expr, $f4:expr $(,)?) => {
        $crate::functional::lift4($h, $f1, $f2, $f3, $f4)
    };
}

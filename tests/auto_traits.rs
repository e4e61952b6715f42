//! Compile-time checks on the kernel's value types.
use banana::{Body, CollisionResult, EntityId, InvalidArgument, Registry, Tuning, Viewport};
use static_assertions::assert_impl_all;

assert_impl_all!(Body: Clone, Send, Sync, std::fmt::Debug);
assert_impl_all!(CollisionResult: Copy, Send, Sync);
assert_impl_all!(Tuning: Copy, Default, Send, Sync);
assert_impl_all!(Viewport: Copy, Send, Sync);
assert_impl_all!(EntityId: Copy, Ord, std::hash::Hash);
assert_impl_all!(InvalidArgument: std::error::Error, Send, Sync);
assert_impl_all!(Registry<test_utils::Probe>: Default);

#[test]
fn body_moves_between_threads() {
    let body = test_utils::rect((0.0, 0.0), (1.0, 1.0));
    let moved = std::thread::spawn(move || {
        let mut body = body;
        body.set_velocity(1.0, 0.0);
        body.advance_one_tick();
        body
    })
    .join()
    .expect("thread completes");
    assert_eq!(moved.position().x, 0.0);
}

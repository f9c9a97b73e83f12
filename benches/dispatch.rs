use criterion::{Criterion, criterion_group, criterion_main};
use openpgp_bridge::transport::{ChannelRegistry, FnHandler, NativeBinding, TransportError};
use openpgp_bridge::wire::schema::StringResponse;
use openpgp_bridge::wire::to_bytes;
use openpgp_bridge::{BridgeConfig, OpenPgp};
use std::sync::Arc;

struct EchoBinding;

impl NativeBinding for EchoBinding {
    fn is_available(&self) -> bool {
        true
    }

    fn call(&self, name: &str, _payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        Ok(to_bytes(&StringResponse::ok(name.to_string()))?)
    }
}

fn bench_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let registry = Arc::new(ChannelRegistry::new());
    registry.register(
        "openpgp",
        Arc::new(FnHandler::new(|method: &str, _payload: &[u8]| {
            Ok(to_bytes(&StringResponse::ok(method.to_string()))?)
        })),
    );
    let via_channel = OpenPgp::with_host(BridgeConfig::default(), registry, None);
    let via_native = OpenPgp::with_host(
        BridgeConfig::default(),
        Arc::new(ChannelRegistry::new()),
        Some(Arc::new(EchoBinding)),
    );

    c.bench_function("sign via host channel", |b| {
        b.to_async(&rt)
            .iter(|| async { via_channel.sign("message", "<pk>", "<sk>", "pw", None).await.unwrap() });
    });
    c.bench_function("sign via native binding", |b| {
        b.to_async(&rt)
            .iter(|| async { via_native.sign("message", "<pk>", "<sk>", "pw", None).await.unwrap() });
    });
}

criterion_group!(benches, bench_round_trip);
criterion_main!(benches);

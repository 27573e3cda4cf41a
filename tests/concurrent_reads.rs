use enum_field::prelude::*;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Level(u32);

#[tokio::test(flavor = "multi_thread")]
async fn completed_registry_serves_concurrent_readers() {
    let mut r = Registry::<Level>::for_host::<Level>();
    for i in 0..64u32 {
        r.define(format!("L{i}"), DefineOptions::new().object(Level(i)))
            .expect("define");
    }
    let r = Arc::new(r);
    let mut tasks = Vec::new();
    for t in 0..8i64 {
        let r = r.clone();
        tasks.push(tokio::spawn(async move {
            for id in 1..=64i64 {
                let m = r.find(id).expect("member");
                assert_eq!(m.with(|l| l.0 as i64), id - 1);
                assert_eq!(r.get(m.name()).map(|x| x.id()), Some(id));
            }
            assert_eq!(r.all().len(), 64);
            assert!(r.find_by_id(65 + t).is_none());
        }));
    }
    for h in tasks {
        h.await.expect("reader task");
    }
}

//! Engine library surface: the registry, wire codec, event sink, worker
//! loop and frontend that the `engine` binary wires together. Exposed as a
//! library too so integration tests can drive the same pieces the binary
//! uses, without going through a subprocess.

pub mod frontend;
pub mod registry;
pub mod sink;
pub mod wire;
pub mod worker;

//! Shared helpers for integration flows: a scriptable local resolver.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// How the mock resolver treats each request.
#[derive(Clone, Copy)]
pub enum MockBehavior {
    /// Echo id and question back with this many A records.
    Answer(u8),
    /// Reply with bytes that are not a DNS message.
    Garbage,
    /// Read requests and never reply.
    Silent,
}

pub struct MockResolver {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockResolver {
    pub async fn start(behavior: MockBehavior) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock resolver");
        let addr = socket.local_addr().expect("Mock resolver has no address");
        let handle = tokio::spawn(serve(socket, behavior));
        Self { addr, handle }
    }

    pub fn target(&self) -> String {
        self.addr.to_string()
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }
}

async fn serve(socket: UdpSocket, behavior: MockBehavior) {
    let mut buf = vec![0u8; 4096];
    loop {
        let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
            break;
        };
        match behavior {
            MockBehavior::Silent => continue,
            MockBehavior::Garbage => {
                let _ = socket.send_to(b"definitely not dns", peer).await;
            }
            MockBehavior::Answer(count) => {
                if let Ok(request) = Message::from_vec(&buf[..len]) {
                    if let Ok(bytes) = answer_for(&request, count).to_vec() {
                        let _ = socket.send_to(&bytes, peer).await;
                    }
                }
            }
        }
    }
}

fn answer_for(request: &Message, count: u8) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, OpCode::Query);
    reply.set_recursion_desired(request.recursion_desired());
    reply.set_recursion_available(true);
    reply.set_response_code(ResponseCode::NoError);
    if let Some(question) = request.queries().first() {
        reply.add_query(question.clone());
        for i in 0..count {
            let rdata = RData::A(A(Ipv4Addr::new(198, 51, 100, i + 1)));
            reply.add_answer(Record::from_rdata(question.name().clone(), 60, rdata));
        }
    }
    reply
}

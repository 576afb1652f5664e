use std::{io::BufRead, thread};

use crossbeam::channel::unbounded;

use cpc_translate::{
    context::Context,
    io::{Endpoint, Reply},
};

/// Replies to each request in `requests`, in order, using `jobs` worker threads.
///
/// Requests are sent to the workers through a channel, tagged with their index, and the replies are collected and sorted by index.
pub fn reply_all(
    the_context: &Context,
    endpoint: Endpoint,
    requests: Vec<String>,
    jobs: usize,
) -> Vec<Reply> {
    let count = requests.len();
    let (request_tx, request_rx) = unbounded::<(usize, String)>();
    let (reply_tx, reply_rx) = unbounded::<(usize, Reply)>();

    for request in requests.into_iter().enumerate() {
        let _ = request_tx.send(request);
    }
    // Workers stop once the queue is empty and every sender is gone.
    drop(request_tx);

    thread::scope(|scope| {
        for _ in 0..jobs.min(count).max(1) {
            let request_rx = request_rx.clone();
            let reply_tx = reply_tx.clone();
            scope.spawn(move || {
                while let Ok((index, body)) = request_rx.recv() {
                    let reply = the_context.handle(endpoint, &body);
                    let _ = reply_tx.send((index, reply));
                }
            });
        }
    });
    drop(reply_tx);

    let mut replies = reply_rx.iter().collect::<Vec<_>>();
    replies.sort_unstable_by_key(|(index, _)| *index);
    replies.into_iter().map(|(_, reply)| reply).collect()
}

/// The non-empty lines of `reader`.
pub fn read_requests(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut requests = Vec::default();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            requests.push(line);
        }
    }
    Ok(requests)
}

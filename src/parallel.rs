use std::thread;
use std::sync::mpsc;
use std::sync::{ Arc, Mutex };

use log::info;

use crate::world::World;
use crate::camera::Camera;
use crate::canvas::Canvas;

pub enum Message {
    Pixel(usize, usize),
    Terminate,
}

struct Worker {
    thread: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn new(world: Arc<World>, camera: Arc<Camera>,
        canvas: Arc<Mutex<Canvas>>,
        receiver: Arc<Mutex<mpsc::Receiver<Message>>>, depth: u32) -> Worker {

        let thread = thread::spawn(move || loop {
            // Obtain the message being executed.
            let message: Message = receiver.lock().unwrap().recv().unwrap();

            match message {
                Message::Pixel(x, y) => {
                    // Render a pixel on the canvas.
                    let ray = camera.ray_for_pixel(x, y);
                    let color = world.cast(&ray, depth);
                    canvas.lock().unwrap().write_pixel(x, y, &color);
                },

                Message::Terminate => {
                    // Exit the worker thread loop, terminating the thread.
                    break;
                }
            }
        });

        Worker { thread: Some(thread) }
    }
}

pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: mpsc::Sender<Message>,
}

impl ThreadPool {
    pub fn new(size: usize, world: World, camera: Camera,
        canvas: Arc<Mutex<Canvas>>, depth: u32) -> ThreadPool {
        // There should be at least one thread to run workers.
        assert!(size > 0);

        let (sender, receiver) = mpsc::channel();

        let world = Arc::new(world);
        let camera = Arc::new(camera);
        let receiver = Arc::new(Mutex::new(receiver));

        let mut workers = Vec::with_capacity(size);

        for _ in 0..size {
            workers.push(Worker::new(
                Arc::clone(&world),
                Arc::clone(&camera),
                Arc::clone(&canvas),
                Arc::clone(&receiver),
                depth
            ));
        }

        ThreadPool { workers, sender }
    }

    pub fn execute(&mut self, message: Message) {
        self.sender.send(message).unwrap();
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        for _ in &self.workers {
            self.sender.send(Message::Terminate).unwrap();
        }

        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                thread.join().unwrap();
            }
        }
    }
}

/// Renders a world across a pool of worker threads.
///
/// Every pixel becomes one message; workers pull pixels off a shared
/// channel and write their colors into a mutex-guarded canvas. A pixel's
/// color is a pure function of the pixel, the world and the depth, so
/// completion order does not affect the result.
pub fn parallel_render(world: World, camera: Camera, depth: u32,
    threads: usize) -> Canvas {
    let width = camera.width;
    let height = camera.height;
    let canvas = Arc::new(Mutex::new(Canvas::new(width, height)));

    info!("rendering with {} worker threads", threads);
    {
        let mut thread_pool = ThreadPool::new(
            threads, world, camera, Arc::clone(&canvas), depth
        );

        for y in 0..height {
            for x in 0..width {
                thread_pool.execute(Message::Pixel(x, y));
            }
        }
    }

    // The pool has been dropped, so every worker has joined and no other
    // handle to the canvas remains.
    let canvas = Arc::try_unwrap(canvas).ok().unwrap();
    canvas.into_inner().unwrap()
}

/* Tests */

#[test]
fn parallel_render_matches_sequential() {
    let camera = Camera::new(8, 6, std::f64::consts::PI / 3.0);

    let world: World = Default::default();
    let sequential = camera.render(&world, 4);

    let parallel = parallel_render(Default::default(), camera, 4, 2);

    assert_eq!(sequential, parallel);
}

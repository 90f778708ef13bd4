use std::io;
use std::os::fd::{AsRawFd, OwnedFd};

use crate::transmit::FrameSink;

#[cfg(target_os = "linux")]
pub use linux_impl::open_socket_tx;

#[cfg(not(target_os = "linux"))]
pub use unsupported_impl::open_socket_tx;

/// A packet socket bound to one interface. Every write is sent as one link-layer frame.
#[derive(Debug)]
pub struct RawSocket {
    fd: OwnedFd,
    interface: String,
}

impl RawSocket {
    pub fn interface(&self) -> &str {
        &self.interface
    }
}

impl FrameSink for RawSocket {
    fn send(&mut self, frame: &[u8]) -> io::Result<usize> {
        let bytes_written = unsafe {
            libc::write(
                self.fd.as_raw_fd(),
                frame.as_ptr() as *const libc::c_void,
                frame.len(),
            )
        };

        if bytes_written < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(bytes_written as usize)
    }
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use std::{io, mem, os::fd::AsRawFd};

    use libc::{sockaddr_ll, ETH_ALEN, ETH_P_ALL};
    use nix::{
        net::if_::if_nametoindex,
        sys::socket::{socket, AddressFamily, SockFlag, SockProtocol, SockType},
    };

    use super::RawSocket;
    use crate::error::Error;

    /// Open an `AF_PACKET` raw socket and bind it to `interface`.
    ///
    /// The socket stays blocking: the transmit loop waits on each write.
    pub fn open_socket_tx(interface: &str) -> Result<RawSocket, Error> {
        let fd_socket_tx = socket(
            AddressFamily::Packet,
            SockType::Raw,
            SockFlag::SOCK_CLOEXEC,
            SockProtocol::EthAll,
        )
        .map_err(|e| Error::Socket(format!("socket failed: {e}")))?;

        let ifindex = if_nametoindex(interface)
            .map_err(|e| Error::Socket(format!("no interface named {interface}: {e}")))?;

        let mut saddr: sockaddr_ll = unsafe { mem::zeroed() };
        saddr.sll_family = libc::AF_PACKET as u16;
        saddr.sll_protocol = (ETH_P_ALL as u16).to_be();
        saddr.sll_ifindex = ifindex as i32;
        saddr.sll_halen = ETH_ALEN as u8;

        let bind_ret = unsafe {
            libc::bind(
                fd_socket_tx.as_raw_fd(),
                (&saddr as *const libc::sockaddr_ll).cast(),
                mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            )
        };

        if bind_ret < 0 {
            let error = io::Error::last_os_error();
            return Err(Error::Socket(format!("bind to {interface} failed: {error}")));
        }

        Ok(RawSocket {
            fd: fd_socket_tx,
            interface: interface.to_string(),
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod unsupported_impl {
    use super::RawSocket;
    use crate::error::Error;

    pub fn open_socket_tx(interface: &str) -> Result<RawSocket, Error> {
        Err(Error::Socket(format!(
            "cannot open a packet socket on {interface}: AF_PACKET is only available on Linux"
        )))
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_unknown_interface() {
        // Fails either at socket() without CAP_NET_RAW or at the name lookup.
        let result = open_socket_tx("nosuchif0");
        assert!(matches!(result, Err(Error::Socket(_))));
    }
}

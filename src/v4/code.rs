//! DHCPv4 option code registry (RFC 2132 and common extensions).

use dhcproto::v4;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

macro_rules! option_codes {
    ($($variant:ident = $value:literal => $name:literal,)+) => {
        /// An 8-bit DHCP option code.
        ///
        /// Registered codes have a named variant; any other byte is carried as
        /// `Unknown` so a client's parameter request list never loses entries.
        /// Equality, hashing and ordering all follow the numeric code, so
        /// `Unknown(1)` and `SubnetMask` are the same key.
        #[derive(Debug, Clone, Copy)]
        pub enum OptionCode {
            $($variant,)+
            Unknown(u8),
        }

        impl From<u8> for OptionCode {
            fn from(value: u8) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other),
                }
            }
        }

        impl From<OptionCode> for u8 {
            fn from(code: OptionCode) -> u8 {
                match code {
                    $(OptionCode::$variant => $value,)+
                    OptionCode::Unknown(value) => value,
                }
            }
        }

        impl OptionCode {
            /// Canonical registry name, or `None` for unregistered codes.
            pub fn name(&self) -> Option<&'static str> {
                match u8::from(*self) {
                    $($value => Some($name),)+
                    _ => None,
                }
            }
        }
    };
}

option_codes! {
    Pad = 0 => "Pad",
    SubnetMask = 1 => "Subnet Mask",
    TimeOffset = 2 => "Time Offset",
    Router = 3 => "Router",
    TimeServer = 4 => "Time Server",
    NameServer = 5 => "Name Server",
    DomainNameServer = 6 => "Domain Name Server",
    LogServer = 7 => "Log Server",
    CookieServer = 8 => "Cookie Server",
    LprServer = 9 => "LPR Server",
    ImpressServer = 10 => "Impress Server",
    ResourceLocationServer = 11 => "Resource Location Server",
    Hostname = 12 => "Host Name",
    BootFileSize = 13 => "Boot File Size",
    MeritDumpFile = 14 => "Merit Dump File",
    DomainName = 15 => "Domain Name",
    SwapServer = 16 => "Swap Server",
    RootPath = 17 => "Root Path",
    ExtensionsPath = 18 => "Extensions Path",
    IpForwarding = 19 => "IP Forwarding Enable/Disable",
    NonLocalSourceRouting = 20 => "Non-Local Source Routing Enable/Disable",
    PolicyFilter = 21 => "Policy Filter",
    MaxDatagramSize = 22 => "Maximum Datagram Reassembly Size",
    DefaultIpTtl = 23 => "Default IP Time-to-live",
    PathMtuAgingTimeout = 24 => "Path MTU Aging Timeout",
    PathMtuPlateauTable = 25 => "Path MTU Plateau Table",
    InterfaceMtu = 26 => "Interface MTU",
    AllSubnetsLocal = 27 => "All Subnets are Local",
    BroadcastAddr = 28 => "Broadcast Address",
    PerformMaskDiscovery = 29 => "Perform Mask Discovery",
    MaskSupplier = 30 => "Mask Supplier",
    PerformRouterDiscovery = 31 => "Perform Router Discovery",
    RouterSolicitationAddr = 32 => "Router Solicitation Address",
    StaticRoute = 33 => "Static Route",
    TrailerEncapsulation = 34 => "Trailer Encapsulation",
    ArpCacheTimeout = 35 => "ARP Cache Timeout",
    EthernetEncapsulation = 36 => "Ethernet Encapsulation",
    TcpDefaultTtl = 37 => "TCP Default TTL",
    TcpKeepaliveInterval = 38 => "TCP Keepalive Interval",
    TcpKeepaliveGarbage = 39 => "TCP Keepalive Garbage",
    NisDomain = 40 => "Network Information Service Domain",
    NisServers = 41 => "Network Information Servers",
    NtpServers = 42 => "Network Time Protocol Servers",
    VendorExtensions = 43 => "Vendor Specific Information",
    NetBiosNameServers = 44 => "NetBIOS over TCP/IP Name Server",
    NetBiosDatagramDistributionServer = 45 => "NetBIOS over TCP/IP Datagram Distribution Server",
    NetBiosNodeType = 46 => "NetBIOS over TCP/IP Node Type",
    NetBiosScope = 47 => "NetBIOS over TCP/IP Scope",
    XFontServer = 48 => "X Window System Font Server",
    XDisplayManager = 49 => "X Window System Display Manager",
    RequestedIpAddress = 50 => "Requested IP Address",
    AddressLeaseTime = 51 => "IP Address Lease Time",
    OptionOverload = 52 => "Option Overload",
    MessageType = 53 => "DHCP Message Type",
    ServerIdentifier = 54 => "Server Identifier",
    ParameterRequestList = 55 => "Parameter Request List",
    Message = 56 => "Message",
    MaxMessageSize = 57 => "Maximum DHCP Message Size",
    Renewal = 58 => "Renewal (T1) Time Value",
    Rebinding = 59 => "Rebinding (T2) Time Value",
    ClassIdentifier = 60 => "Vendor Class Identifier",
    ClientIdentifier = 61 => "Client Identifier",
    NisPlusDomain = 64 => "Network Information Service+ Domain",
    NisPlusServers = 65 => "Network Information Service+ Servers",
    TftpServerName = 66 => "TFTP Server Name",
    BootfileName = 67 => "Bootfile Name",
    MobileIpHomeAgent = 68 => "Mobile IP Home Agent",
    SmtpServer = 69 => "Simple Mail Transport Protocol Server",
    Pop3Server = 70 => "Post Office Protocol Server",
    NntpServer = 71 => "Network News Transport Protocol Server",
    WwwServer = 72 => "Default World Wide Web Server",
    FingerServer = 73 => "Default Finger Server",
    IrcServer = 74 => "Default Internet Relay Chat Server",
    StreetTalkServer = 75 => "StreetTalk Server",
    StreetTalkDirectoryAssistance = 76 => "StreetTalk Directory Assistance Server",
    UserClass = 77 => "User Class",
    RelayAgentInformation = 82 => "Relay Agent Information",
    ClientArchitecture = 93 => "Client System Architecture",
    TzPosixString = 100 => "PCode",
    TzDatabaseString = 101 => "TCode",
    ClasslessStaticRoute = 121 => "Classless Static Route",
    End = 255 => "End",
}

impl PartialEq for OptionCode {
    fn eq(&self, other: &Self) -> bool {
        u8::from(*self) == u8::from(*other)
    }
}

impl Eq for OptionCode {}

impl Hash for OptionCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        u8::from(*self).hash(state);
    }
}

impl PartialOrd for OptionCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OptionCode {
    fn cmp(&self, other: &Self) -> Ordering {
        u8::from(*self).cmp(&u8::from(*other))
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, u8::from(*self)),
            None => write!(f, "Unknown ({})", u8::from(*self)),
        }
    }
}

impl From<v4::OptionCode> for OptionCode {
    fn from(code: v4::OptionCode) -> Self {
        Self::from(u8::from(code))
    }
}

impl From<OptionCode> for v4::OptionCode {
    fn from(code: OptionCode) -> Self {
        v4::OptionCode::from(u8::from(code))
    }
}

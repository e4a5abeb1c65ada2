#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]

mod limit_orders {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface GelatoLimitOrders {
            function keyOf(
                address _module,
                address _inputToken,
                address payable _owner,
                address _witness,
                bytes calldata _data
            ) external pure returns (bytes32);

            function existOrder(
                address _module,
                address _inputToken,
                address payable _owner,
                address _witness,
                bytes calldata _data
            ) external view returns (bool);

            function encodeEthOrder(
                address _module,
                address _inputToken,
                address payable _owner,
                address _witness,
                bytes calldata _data,
                bytes32 _secret
            ) external pure returns (bytes memory);

            function depositEth(bytes calldata _data) external payable;

            function cancelOrder(
                address _module,
                address _inputToken,
                address payable _owner,
                address _witness,
                bytes calldata _data
            ) external;
        }
    );
}
pub use limit_orders::GelatoLimitOrders;

mod router {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface ERC20OrderRouter {
            function depositToken(
                uint256 _amount,
                address _module,
                address _inputToken,
                address payable _owner,
                address _witness,
                bytes calldata _data,
                bytes32 _secret
            ) external;
        }
    );
}
pub use router::ERC20OrderRouter;

mod erc20 {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IERC20 {
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function balanceOf(address account) external view returns (uint256);
        }
    );
}
pub use erc20::IERC20;
